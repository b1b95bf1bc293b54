//! File-based orchestration of the compress/decompress pipelines.
//!
//! Each stage reads its input file fully, transforms it in memory, then
//! removes and rewrites the destination file. The same path is reused
//! as both input and output from one stage to the next, matching the
//! original implementation's "remove, then append" file semantics.

use std::path::Path;

use crate::bwt;
use crate::error::Error;
use crate::lzw;
use crate::mtf;

const ORIGINAL_INDEX_BYTES: usize = 4;

fn write_stage(path: &Path, data: &[u8]) -> Result<(), Error> {
    match std::fs::remove_file(path) {
        Ok(()) => {}
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
        Err(e) => return Err(e.into()),
    }
    std::fs::write(path, data)?;
    Ok(())
}

/// Run `BWT encode -> MTF encode -> LZW encode` on the file at `src`,
/// leaving the final compressed stream at `dst`.
pub fn compress(src: &Path, dst: &Path) -> Result<(), Error> {
    let input = std::fs::read(src)?;
    log::debug!("pipeline: read {} bytes from {}", input.len(), src.display());

    let (last_column, original_index) = bwt::encode(&input)?;
    let mut bwt_stream = Vec::with_capacity(ORIGINAL_INDEX_BYTES + last_column.len());
    bwt_stream.extend_from_slice(&original_index.to_be_bytes());
    bwt_stream.extend_from_slice(&last_column);
    write_stage(dst, &bwt_stream)?;
    log::debug!("pipeline: bwt stage wrote {} bytes", bwt_stream.len());

    let bwt_stream = std::fs::read(dst)?;
    let mtf_stream = mtf::encode(&bwt_stream);
    write_stage(dst, &mtf_stream)?;
    log::debug!("pipeline: mtf stage wrote {} bytes", mtf_stream.len());

    let mtf_stream = std::fs::read(dst)?;
    let lzw_stream = lzw::compress(&mtf_stream);
    write_stage(dst, &lzw_stream)?;
    log::debug!("pipeline: lzw stage wrote {} bytes", lzw_stream.len());

    Ok(())
}

/// Run `LZW decode -> MTF decode -> BWT decode` on the file at `src`,
/// leaving the recovered original bytes at `dst`.
pub fn decompress(src: &Path, dst: &Path) -> Result<(), Error> {
    let lzw_stream = std::fs::read(src)?;
    log::debug!("pipeline: read {} bytes from {}", lzw_stream.len(), src.display());

    let mtf_stream = lzw::expand(&lzw_stream);
    write_stage(dst, &mtf_stream)?;
    log::debug!("pipeline: lzw stage recovered {} bytes", mtf_stream.len());

    let mtf_stream = std::fs::read(dst)?;
    let bwt_stream = mtf::decode(&mtf_stream);
    write_stage(dst, &bwt_stream)?;
    log::debug!("pipeline: mtf stage recovered {} bytes", bwt_stream.len());

    let bwt_stream = std::fs::read(dst)?;
    if bwt_stream.len() < ORIGINAL_INDEX_BYTES {
        return Err(Error::CorruptBwtStream);
    }
    let (header, last_column) = bwt_stream.split_at(ORIGINAL_INDEX_BYTES);
    let original_index = u32::from_be_bytes(header.try_into().expect("split_at(4) gives 4 bytes"));
    let original = bwt::decode(last_column, original_index)?;
    write_stage(dst, &original)?;
    log::debug!("pipeline: bwt stage recovered {} bytes", original.len());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn roundtrip(input: &[u8]) {
        let dir = tempfile::tempdir().expect("tempdir");
        let src = dir.path().join("input.bin");
        let packed = dir.path().join("packed.bin");
        let restored = dir.path().join("restored.bin");

        let mut f = std::fs::File::create(&src).expect("create src");
        f.write_all(input).expect("write src");
        drop(f);

        compress(&src, &packed).expect("compress");
        decompress(&packed, &restored).expect("decompress");

        let got = std::fs::read(&restored).expect("read restored");
        assert_eq!(got, input);
    }

    #[test]
    fn empty_file_round_trips() {
        roundtrip(b"");
    }

    #[test]
    fn single_byte_round_trips() {
        roundtrip(b"a");
    }

    #[test]
    fn banana_round_trips() {
        roundtrip(b"banana");
    }

    #[test]
    fn abracadabra_round_trips() {
        roundtrip(b"ABRACADABRA");
    }

    #[test]
    fn compress_rejects_sentinel_byte() {
        let dir = tempfile::tempdir().expect("tempdir");
        let src = dir.path().join("input.bin");
        let dst = dir.path().join("packed.bin");
        std::fs::write(&src, b"a\0b").expect("write src");
        let err = compress(&src, &dst).unwrap_err();
        assert!(matches!(err, Error::InputContainsSentinel));
    }

    #[test]
    fn random_bytes_round_trip() {
        use rand::Rng;
        let mut rng = rand::thread_rng();
        let input: Vec<u8> = (0..65536).map(|_| rng.gen_range(1u8..=255)).collect();
        roundtrip(&input);
    }

    #[test]
    fn intermediate_stage_may_reuse_the_same_path() {
        // src and dst identical exercises the "read fully before
        // overwriting" contract directly.
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("inplace.bin");
        std::fs::write(&path, b"mississippi").expect("write");
        compress(&path, &path).expect("compress");
        decompress(&path, &path).expect("decompress");
        assert_eq!(std::fs::read(&path).expect("read"), b"mississippi");
    }
}
