//! Student module: repository contract, SeaORM repository, service.

pub mod repo;
pub mod repository;
pub mod service;

pub use repository::StudentRepository;
pub use service::StudentService;
