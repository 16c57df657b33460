mod continuation;
pub mod encoding_error;
pub mod prefix_integer;
pub mod prefix_width;
pub mod representation;
