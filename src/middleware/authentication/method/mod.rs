mod f_init_data;

pub use f_init_data::{try_init_data, INIT_DATA_HEADER};
