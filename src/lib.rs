pub mod blogchain;
pub mod config;
pub mod content;
pub mod logger;
pub mod post;
pub mod post_error;
pub mod post_list;
pub mod site_writer;
pub mod slug;
pub mod source_filter;
pub mod text_utils;
pub mod view;
mod test_data;
