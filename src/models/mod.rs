pub mod block;
pub mod exam;
pub mod loaders;
pub mod question;
pub mod subject;

pub use block::{Block, BoundingBox, Document, ImageSource, Page};
pub use exam::ExamInfo;
pub use loaders::{load_all_documents, load_document};
pub use question::{
    ExtractedData, ExtractedQuestion, Image, MathExpression, PageText, Question, QuestionOption,
    QuestionType, Statement,
};
pub use subject::Subject;
