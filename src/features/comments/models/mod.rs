mod comment;

pub use comment::Comment;
