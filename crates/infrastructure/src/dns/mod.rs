pub mod rdata;
pub mod record_type_map;
pub mod resolver;

pub use record_type_map::RecordTypeMapper;
pub use resolver::HickoryRecordResolver;
