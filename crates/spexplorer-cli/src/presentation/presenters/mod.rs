pub mod explorer;
pub mod init;

pub use explorer::{
    present_column_panel, present_columns, present_header, present_list_selector,
    present_lists, present_screen,
};
pub use init::present_init_result;
