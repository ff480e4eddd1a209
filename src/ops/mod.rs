pub mod category_ops;
pub mod channel_ops;
pub mod selection_ops;
