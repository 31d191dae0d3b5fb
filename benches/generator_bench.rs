use apigen::{generate, parse_source, Diagnostics, ErrorRegistry};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

const DECLARATION: &str = r#"
pub struct ProfileParams {
    #[api_validator("required")]
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

impl OtherApi {
    /// apigen:api {"url": "/user/create", "method": "POST"}
    pub fn create(&self, params: OtherCreateParams) -> Result<OtherUser, HandlerError> {
        unimplemented!()
    }
}
"#;

/// Benchmark extraction and normalization on their own.
fn bench_extraction(c: &mut Criterion) {
    c.bench_function("extract_model", |b| {
        b.iter(|| {
            let mut diags = Diagnostics::new();
            black_box(parse_source(black_box(DECLARATION), &mut diags).unwrap())
        })
    });
}

/// Benchmark emission over a pre-built model.
fn bench_emission(c: &mut Criterion) {
    let mut diags = Diagnostics::new();
    let api = parse_source(DECLARATION, &mut diags).unwrap();
    let registry = ErrorRegistry::new();

    c.bench_function("emit_module", |b| {
        b.iter(|| {
            let mut diags = Diagnostics::new();
            black_box(generate(black_box(&api), &registry, &mut diags))
        })
    });
}

/// Benchmark the whole pipeline the CLI runs per invocation, minus I/O.
fn bench_full_pipeline(c: &mut Criterion) {
    let registry = ErrorRegistry::new();

    c.bench_function("full_pipeline", |b| {
        b.iter(|| {
            let mut diags = Diagnostics::new();
            let api = parse_source(black_box(DECLARATION), &mut diags).unwrap();
            black_box(generate(&api, &registry, &mut diags))
        })
    });
}

criterion_group!(benches, bench_extraction, bench_emission, bench_full_pipeline);
criterion_main!(benches);
