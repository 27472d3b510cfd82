pub mod item_closing;
