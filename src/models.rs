pub mod category_dto;
pub mod form_dao;
pub mod health_dto;
pub mod image_dao;
pub mod ping_dto;
pub mod status_dto;
pub mod upload_dao;
pub mod upload_dto;
pub mod uploadpayload_dto;
pub mod uploadrequest_dto;
pub mod uploadresponse_dto;
