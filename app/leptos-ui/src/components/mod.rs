pub mod report_card;
pub mod spinner;
