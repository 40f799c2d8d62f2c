pub mod analysis;       // Organization analysis (single page)
