pub mod student;
pub mod validation;

pub use student::StudentService;
pub use validation::RequestValidator;
