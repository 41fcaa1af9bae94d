pub mod analytics;
pub mod auth;
pub mod question;
pub mod response;
pub mod survey;

pub use analytics::handle_analytics_command;
pub use auth::handle_auth_command;
pub use question::handle_question_command;
pub use response::handle_response_command;
pub use survey::handle_survey_command;
