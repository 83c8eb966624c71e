pub mod charts;
pub mod filters;
pub mod header;
pub mod result_list;
pub mod search_bar;
pub mod status_indicator;
