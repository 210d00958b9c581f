mod common;

mod test_capture;
mod test_items;
mod test_turn_order;
