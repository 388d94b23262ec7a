pub mod assist;
pub mod assist_request;
pub mod assist_response;
pub mod prompt_log_dto;
