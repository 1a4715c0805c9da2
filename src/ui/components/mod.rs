pub mod header;
pub mod spinner;
pub mod tab_bar;
pub mod track_list;
