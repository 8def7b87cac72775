pub mod ad_record;
pub mod ad_request;
pub mod follow_up;
