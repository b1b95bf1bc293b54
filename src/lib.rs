//! # bwt-lzw-pack
//!
//! A lossless byte-stream compressor built from three composable
//! stages: a Burrows-Wheeler Transform backed by a linear-time DC3
//! suffix array, a Move-To-Front transform, and a variable-width LZW
//! coder over a bit-packed stream.
//!
//! `compress = LZW ∘ MTF ∘ BWT`, `decompress = BWT⁻¹ ∘ MTF⁻¹ ∘ LZW⁻¹`.
//! Each stage is also usable independently as a buffer-to-buffer
//! transform; [`pipeline`] layers file-level orchestration on top.
//!
//! ## File Example
//!
//! ```rs
//! use bwt_lzw_pack::pipeline;
//! pipeline::compress("some_input_path".as_ref(),"some_output_path".as_ref())
//!     .expect("compression failed");
//! ```
//!
//! ## Buffer Example
//!
//! ```rs
//! use bwt_lzw_pack::{bwt,mtf,lzw};
//! let test_data = b"This is the chaunt of the priests.";
//! let (last_column,original_index) = bwt::encode(test_data).expect("bwt failed");
//! let packed = lzw::compress(&mtf::encode(&last_column));
//! ```

pub mod bitstream;
pub mod bwt;
pub mod error;
pub mod lzw;
pub mod mtf;
pub mod pipeline;
pub mod suffix_array;

pub use error::Error;
