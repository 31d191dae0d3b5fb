#![allow(clippy::unwrap_used, clippy::expect_used)]

use apigen::{generate, parse_source, Diagnostics, ErrorRegistry};

const DECLARATION: &str = r#"
pub struct ApiError {
    pub status: u16,
    pub message: String,
}

pub enum HandlerError {
    Api(ApiError),
    Internal(String),
}

pub struct ProfileParams {
    #[api_validator("required,min=10")]
    pub login: String,
}

pub struct CreateParams {
    #[api_validator("required,min=10,paramname=full_name")]
    pub login: String,
    #[api_validator("enum=user|moderator|admin,default=user")]
    pub status: String,
    #[api_validator("min=0,max=128")]
    pub age: i64,
}

pub struct MyApi;

impl MyApi {
    /// apigen:api {"url": "/user/profile"}
    pub fn profile(&self, params: ProfileParams) -> Result<User, HandlerError> {
        unimplemented!()
    }

    /// apigen:api {"url": "/user/create", "auth": true, "method": "POST"}
    pub fn create(&self, params: CreateParams) -> Result<NewUser, HandlerError> {
        unimplemented!()
    }
}

pub struct OtherCreateParams {
    #[api_validator("required,min=3")]
    pub username: String,
    #[api_validator("default=warrior,enum=warrior|sorcerer|rogue")]
    pub class: String,
    #[api_validator("max=50")]
    pub level: i64,
}

pub struct OtherApi;

impl OtherApi {
    /// apigen:api {"url": "/user/create", "method": "POST"}
    pub fn create(&self, params: OtherCreateParams) -> Result<OtherUser, HandlerError> {
        unimplemented!()
    }
}
"#;

fn generate_fixture() -> String {
    let mut diags = Diagnostics::new();
    let api = parse_source(DECLARATION, &mut diags).unwrap();
    let text = generate(&api, &ErrorRegistry::new(), &mut diags);
    assert!(diags.is_empty(), "clean fixture: {:?}", diags.issues());
    text
}

fn pos(text: &str, needle: &str) -> usize {
    text.find(needle)
        .unwrap_or_else(|| panic!("`{needle}` not found in generated output"))
}

fn pos_after(text: &str, from: usize, needle: &str) -> usize {
    text[from..]
        .find(needle)
        .map(|offset| offset + from)
        .unwrap_or_else(|| panic!("`{needle}` not found after offset {from}"))
}

/// Slice of the generated text covering one handler body.
fn handler_body<'a>(text: &'a str, handler_fn: &str) -> &'a str {
    let start = pos(text, &format!("fn {handler_fn}"));
    let end = text[start + 1..]
        .find("\nimpl ")
        .map(|offset| offset + start + 1)
        .unwrap_or(text.len());
    &text[start..end]
}

#[test]
fn test_sections_emit_in_fixed_order() {
    let text = generate_fixture();
    assert!(text.starts_with("// Code generated by apigen-gen; do not edit."));

    let runtime = pos(&text, "impl ApiError");
    let first_envelope = pos(&text, "struct RespMyApiProfile");
    let first_handler = pos(&text, "fn handle_profile");
    let first_dispatcher = pos(&text, "pub fn serve_http");
    assert!(runtime < first_envelope);
    assert!(first_envelope < first_handler);
    assert!(first_handler < first_dispatcher);
}

#[test]
fn test_envelopes_follow_handler_declaration_order() {
    let text = generate_fixture();
    let profile = pos(&text, "struct RespMyApiProfile");
    let create = pos(&text, "struct RespMyApiCreate");
    let other = pos(&text, "struct RespOtherApiCreate");
    assert!(profile < create && create < other);
}

#[test]
fn test_envelope_serializes_payload_before_error() {
    let text = generate_fixture();
    let envelope = pos(&text, "struct RespMyApiCreate");
    let response = pos_after(&text, envelope, "response: NewUser,");
    let error = pos_after(&text, envelope, "error: String,");
    assert!(response < error);
}

#[test]
fn test_post_handler_gate_order() {
    let text = generate_fixture();
    let body = handler_body(&text, "handle_create");

    let verb = pos(body, "req.method() != &Method::POST");
    let verb_err = pos(body, "err_method_not_allowed().respond()");
    let auth = pos(body, "!auth_ok(req)");
    let auth_err = pos(body, "err_unauthorized().respond()");
    let form = pos(body, "let form = parse_form(req.body());");
    let first_read = pos(body, r#"form_value(&form, "login")"#);
    assert!(verb < verb_err && verb_err < auth);
    assert!(auth < auth_err && auth_err < form);
    assert!(form < first_read);
}

#[test]
fn test_auth_check_absent_without_auth_marker() {
    let text = generate_fixture();
    assert!(!handler_body(&text, "handle_profile").contains("auth_ok"));

    let authed = handler_body(&text, "handle_create");
    assert!(authed.contains("auth_ok"));

    // OtherApi::create shares the wrapper name but carries no auth marker.
    let second = pos_after(&text, pos(&text, "fn handle_create") + 1, "fn handle_create");
    let second_end = pos_after(&text, second, "\nimpl ");
    assert!(!text[second..second_end].contains("auth_ok"));
}

#[test]
fn test_text_rules_apply_in_precedence_order() {
    let text = generate_fixture();
    let body = handler_body(&text, "handle_create");

    let read = pos(body, r#"let mut login = form_value(&form, "login");"#);
    let required = pos(body, "if login.is_empty()");
    let alias = pos(body, r#"form_value(&form, "full_name")"#);
    let min = pos(body, r#""login len must be >= 10""#);
    assert!(read < required && required < alias && alias < min);
}

#[test]
fn test_default_applies_before_enum_membership() {
    let text = generate_fixture();
    let body = handler_body(&text, "handle_create");

    let default = pos(body, r#"status = "user".to_string();"#);
    let en = pos(body, r#"["user", "moderator", "admin"].contains(&status.as_str())"#);
    let message = pos(body, r#""status must be one of [user, moderator, admin]""#);
    assert!(default < en && en < message);
}

#[test]
fn test_integer_field_parses_then_bounds() {
    let text = generate_fixture();
    let body = handler_body(&text, "handle_create");

    let read = pos(body, r#"let age_raw = form_value(&form, "age");"#);
    let parse = pos(body, "let age: i64 = match age_raw.parse()");
    let parse_err = pos(body, r#"api_error("age must be int", 400)"#);
    let min = pos(body, r#"api_error("age must be >= 0", 400)"#);
    let max = pos(body, r#"api_error("age must be <= 128", 400)"#);
    assert!(read < parse && parse < parse_err);
    assert!(parse_err < min && min < max);
}

#[test]
fn test_any_verb_handler_reads_query_on_get() {
    let text = generate_fixture();
    let body = handler_body(&text, "handle_profile");

    assert!(body.contains("req.method() == &Method::GET"));
    assert!(body.contains(r#"parse_form(req.uri().query().unwrap_or(""))"#));
    assert!(body.contains("parse_form(req.body())"));
    assert!(body.contains("if login.is_empty()"));
    assert!(!body.contains("len must be"));
    assert!(!body.contains("must be one of"));
}

#[test]
fn test_handler_builds_params_and_wraps_result() {
    let text = generate_fixture();
    let body = handler_body(&text, "handle_create");

    let params = pos(body, "let params = CreateParams {");
    let call = pos(body, "match self.create(params)");
    let envelope = pos(body, "RespMyApiCreate {");
    let payload = pos(body, "response: result,");
    let api_err = pos(body, "Err(HandlerError::Api(err)) => err.respond(),");
    let internal = pos(body, "Err(HandlerError::Internal(_)) => err_internal().respond(),");
    assert!(params < call && call < envelope);
    assert!(envelope < payload && payload < api_err && api_err < internal);

    // Every CreateParams field carries a descriptor, so no update base.
    assert!(!body.contains("..Default::default()"));
}

#[test]
fn test_plain_declared_fields_construct_from_default_base() {
    let source = r#"
        pub struct NoteParams {
            #[api_validator("required")]
            pub login: String,
            pub note: String,
        }
        impl MyApi {
            /// apigen:api {"url": "/note", "method": "POST"}
            pub fn note(&self, params: NoteParams) -> Result<User, HandlerError> {
                unimplemented!()
            }
        }
    "#;
    let mut diags = Diagnostics::new();
    let api = parse_source(source, &mut diags).unwrap();
    let text = generate(&api, &ErrorRegistry::new(), &mut diags);
    assert!(diags.is_empty(), "plain fields are fine: {:?}", diags.issues());

    let body = handler_body(&text, "handle_note");
    let params = pos(body, "let params = NoteParams {");
    let login = pos_after(body, params, "login,");
    let base = pos_after(body, login, "..Default::default()");
    let close = pos_after(body, base, "};");
    assert!(params < login && login < base && base < close);
    // The plain field is never read from the request.
    assert!(!body.contains(r#"form_value(&form, "note")"#));
}

#[test]
fn test_dispatchers_group_by_owner_in_first_appearance_order() {
    let text = generate_fixture();
    let my_api = pos(&text, "impl MyApi {\n    pub fn serve_http");
    let other_api = pos(&text, "impl OtherApi {\n    pub fn serve_http");
    assert!(my_api < other_api);

    let profile_arm = pos_after(&text, my_api, r#""/user/profile" => self.handle_profile(req),"#);
    let create_arm = pos_after(&text, my_api, r#""/user/create" => self.handle_create(req),"#);
    let fallback = pos_after(&text, my_api, "_ => err_unknown_route().respond(),");
    assert!(profile_arm < create_arm && create_arm < fallback);
    assert!(fallback < other_api);

    let other_arm = pos_after(&text, other_api, r#""/user/create" => self.handle_create(req),"#);
    assert!(other_arm > other_api);
}

#[test]
fn test_runtime_defines_shared_errors_once() {
    let text = generate_fixture();
    assert_eq!(text.matches("fn err_unknown_route()").count(), 1);
    assert_eq!(text.matches("fn err_method_not_allowed()").count(), 1);
    assert_eq!(text.matches("fn err_missing_value()").count(), 1);
    assert_eq!(text.matches("fn err_internal()").count(), 1);
    assert_eq!(text.matches("fn err_unauthorized()").count(), 1);
    assert_eq!(text.matches("fn auth_ok(").count(), 1);
    assert_eq!(text.matches("fn parse_form(").count(), 1);
}

#[test]
fn test_generation_is_deterministic() {
    let first = generate_fixture();
    let second = generate_fixture();
    assert_eq!(first, second);
}

#[test]
fn test_handler_without_input_struct_is_skipped_but_others_survive() {
    let source = r#"
        pub struct KnownParams {
            #[api_validator("required")]
            pub login: String,
        }
        impl MyApi {
            /// apigen:api {"url": "/known"}
            pub fn known(&self, params: KnownParams) -> Result<User, HandlerError> {
                unimplemented!()
            }

            /// apigen:api {"url": "/ghost"}
            pub fn ghost(&self, params: GhostParams) -> Result<User, HandlerError> {
                unimplemented!()
            }
        }
    "#;
    let mut diags = Diagnostics::new();
    let api = parse_source(source, &mut diags).unwrap();
    let text = generate(&api, &ErrorRegistry::new(), &mut diags);

    assert!(text.contains("fn handle_known"));
    assert!(!text.contains("fn handle_ghost"));
    assert!(text.contains(r#""/known" => self.handle_known(req),"#));
    assert!(!text.contains(r#""/ghost""#));
    assert!(diags
        .issues()
        .iter()
        .any(|issue| issue.kind == "MissingInputStruct"));
}
