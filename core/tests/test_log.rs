#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use ccc_core::prelude::*;

    fn init_logger() {
        let _ = env_logger::builder().is_test(true).filter_level(log::LevelFilter::Debug).try_init();
    }

    fn capture(config: CodecConfig) -> (Codec, Arc<Mutex<Vec<String>>>) {
        let lines = Arc::new(Mutex::new(Vec::new()));
        let sink_lines = Arc::clone(&lines);
        let sink: LineSink = Arc::new(move |line: &str| {
            sink_lines.lock().unwrap().push(line.to_string());
        });
        (Codec::with_sink(config, sink).unwrap(), lines)
    }

    #[test]
    fn verbose_lines_cover_every_layer() {
        init_logger();
        let (codec, lines) = capture(CodecConfig::default().with_verbose(true));
        let (codes, meta) = codec.compress(b"verbose logging").unwrap();
        codec.decompress(&codes, &meta).unwrap();

        let lines = lines.lock().unwrap();
        for needle in ["packed", "LZW produced", "ring length", "framed", "removed", "restored"] {
            assert!(
                lines.iter().any(|l| l.starts_with("[ccc] ") && l.contains(needle)),
                "no line mentions {needle:?}: {lines:?}"
            );
        }
    }

    #[test]
    fn quiet_codec_emits_nothing() {
        init_logger();
        let (codec, lines) = capture(CodecConfig::default());
        let (codes, meta) = codec.compress(b"quiet").unwrap();
        codec.decompress(&codes, &meta).unwrap();
        assert!(lines.lock().unwrap().is_empty());
    }

    #[test]
    fn warnings_ignore_verbose_flag() {
        init_logger();
        let (codec, lines) = capture(CodecConfig::lenient());
        codec.unpack("AXCG", 1).unwrap();
        let lines = lines.lock().unwrap();
        assert_eq!(lines.len(), 1);
        assert!(lines[0].starts_with("[ccc warning] skipped 1 invalid symbol(s)"));
    }
}
