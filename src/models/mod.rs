pub mod completion;
pub mod course;
pub mod module;
pub mod section;

pub use completion::*;
pub use course::*;
pub use module::*;
pub use section::*;

pub type CourseId = i64;
pub type SectionId = i64;
pub type ModuleId = i64;
pub type UserId = i64;
