mod export;
mod file_ops;

pub use export::{split_output_path, write_examples_jsonl, write_json};
pub use file_ops::{basename, has_image_extension, list_folders, list_images, read_text_file};
