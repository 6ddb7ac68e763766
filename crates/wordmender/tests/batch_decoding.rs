#![allow(missing_docs)]

use std::sync::{
    Arc,
    atomic::{AtomicUsize, Ordering},
};

use proptest::prelude::*;
use wordmender::{
    BatchDecoder,
    BatchDecoderOptions,
    DType,
    Data,
    Device,
    PieceMapVocab,
    PieceVocab,
    TokenBatch,
    VocabIndex,
    WMError,
    WMResult,
};

const PIECES: &[&str] = &[
    "<unk>",
    "<s>",
    "</s>",
    "<pad>",
    "\u{2581}",
    "\u{2581}He",
    "\u{2581}quick",
    "\u{2581}brown",
    "\u{2581}fox",
    "llo",
    "s",
    "ed",
    "\u{2581}jump",
    ",",
    ".",
    "<0xC3>",
    "<0xA9>",
    "<0xF0>",
    "<0x9F>",
    "<0x98>",
    "<0x8A>",
];

/// A [`PieceVocab`] which counts calls into the wrapped vocabulary.
struct CountingVocab {
    inner: PieceMapVocab,
    lookups: AtomicUsize,
    merges: AtomicUsize,
}

impl CountingVocab {
    fn new() -> Self {
        Self {
            inner: PieceMapVocab::from_pieces(PIECES).unwrap(),
            lookups: AtomicUsize::new(0),
            merges: AtomicUsize::new(0),
        }
    }

    fn calls(&self) -> (usize, usize) {
        (
            self.lookups.load(Ordering::SeqCst),
            self.merges.load(Ordering::SeqCst),
        )
    }
}

impl PieceVocab for CountingVocab {
    fn len(&self) -> usize {
        self.inner.len()
    }

    fn index_to_token(
        &self,
        index: VocabIndex,
    ) -> WMResult<&str> {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        self.inner.index_to_token(index)
    }

    fn merge(
        &self,
        tokens: &[&str],
    ) -> WMResult<String> {
        self.merges.fetch_add(1, Ordering::SeqCst);
        self.inner.merge(tokens)
    }
}

/// A vocabulary whose merge always fails.
struct BrokenMergeVocab(PieceMapVocab);

impl PieceVocab for BrokenMergeVocab {
    fn len(&self) -> usize {
        self.0.len()
    }

    fn index_to_token(
        &self,
        index: VocabIndex,
    ) -> WMResult<&str> {
        self.0.index_to_token(index)
    }

    fn merge(
        &self,
        _tokens: &[&str],
    ) -> WMResult<String> {
        Err(WMError::External("merge exploded".to_string()))
    }
}

fn counting_decoder() -> (Arc<CountingVocab>, BatchDecoder<CountingVocab>) {
    let vocab = Arc::new(CountingVocab::new());
    (vocab.clone(), BatchDecoder::new(vocab))
}

#[test]
fn test_hello_examples() {
    let (vocab, decoder) = counting_decoder();

    let batch = TokenBatch::from_rows(&[[5i64, 9]]).unwrap();
    assert_eq!(decoder.decode(&batch).unwrap(), ["Hello"]);
    assert_eq!(vocab.calls(), (2, 1));

    let batch = TokenBatch::from_rows(&[[5i64, 9], [5, 9]]).unwrap();
    assert_eq!(decoder.decode(&batch).unwrap(), ["Hello", "Hello"]);
    assert_eq!(vocab.calls(), (6, 3));
}

#[test]
fn test_sentences() {
    let decoder = BatchDecoder::new(Arc::new(PieceMapVocab::from_pieces(PIECES).unwrap()));

    let batch = TokenBatch::from_rows(&[
        [1i32, 6, 7, 8, 12, 11, 14, 2],
        [1, 8, 10, 13, 8, 15, 16, 2],
        [5, 9, 4, 17, 18, 19, 20, 3],
    ])
    .unwrap();

    assert_eq!(
        decoder.decode(&batch).unwrap(),
        [
            "quick brown fox jumped.",
            "foxs, fox\u{e9}",
            "Hello \u{1f60a}",
        ]
    );
}

#[test]
fn test_empty_batch_performs_no_lookups() {
    let (vocab, decoder) = counting_decoder();

    for dtype in [DType::I16, DType::I32, DType::I64] {
        let batch = TokenBatch::from_le_bytes(dtype, vec![0, 12], &[]).unwrap();
        assert!(decoder.decode(&batch).unwrap().is_empty());
    }
    assert_eq!(vocab.calls(), (0, 0));
}

#[test]
fn test_non_batch_input_performs_no_lookups() {
    let (vocab, decoder) = counting_decoder();

    let err = decoder.decode_data(Data::from("He llo")).unwrap_err();
    assert!(matches!(err, WMError::InvalidArgument(_)));
    assert!(err.to_string().contains("expects as input a token batch"));

    assert!(matches!(
        decoder.decode_data(Data::List(vec![Data::Int(5), Data::Int(9)])),
        Err(WMError::InvalidArgument(_))
    ));
    assert_eq!(vocab.calls(), (0, 0));
}

#[test]
fn test_unsupported_dtype_performs_no_lookups() {
    let (vocab, decoder) = counting_decoder();

    let cases = [
        TokenBatch::from_rows(&[[5.0f64, 9.0]]).unwrap(),
        TokenBatch::from_rows(&[[5.0f32, 9.0]]).unwrap(),
        TokenBatch::from_rows(&[[5i8, 9]]).unwrap(),
        TokenBatch::from_rows(&[[true, false]]).unwrap(),
    ];
    for batch in cases {
        let dtype = batch.dtype();
        let batch = batch.with_device(Device::Accelerator { ordinal: 2 });
        match decoder.decode(&batch) {
            Err(WMError::NotSupported { dtype: reported }) => assert_eq!(reported, dtype),
            other => panic!("unexpected: {other:?}"),
        }
        match decoder.decode_data(batch.into()) {
            Err(err) => assert!(err.to_string().contains(&dtype.to_string())),
            Ok(data) => panic!("unexpected: {data:?}"),
        }
    }
    assert_eq!(vocab.calls(), (0, 0));
}

#[test]
fn test_raw_bytes_batch() {
    let decoder = BatchDecoder::new(Arc::new(PieceMapVocab::from_pieces(PIECES).unwrap()));

    let ids: [i16; 4] = [5, 9, 6, 7];
    let bytes: Vec<u8> = ids.iter().flat_map(|v| v.to_le_bytes()).collect();
    let batch = TokenBatch::from_le_bytes(DType::I16, vec![2, 2], &bytes)
        .unwrap()
        .with_device(Device::Accelerator { ordinal: 0 });

    assert_eq!(decoder.decode(&batch).unwrap(), ["Hello", "quick brown"]);
}

#[test]
fn test_vocab_failures_propagate_unchanged() {
    let decoder = BatchDecoder::new(Arc::new(BrokenMergeVocab(
        PieceMapVocab::from_pieces(PIECES).unwrap(),
    )));

    let batch = TokenBatch::from_rows(&[[5i64, 9]]).unwrap();
    match decoder.decode(&batch) {
        Err(WMError::External(msg)) => assert_eq!(msg, "merge exploded"),
        other => panic!("unexpected: {other:?}"),
    }

    let (_, decoder) = counting_decoder();
    let batch = TokenBatch::from_rows(&[[5i64, 9], [5, PIECES.len() as i64]]).unwrap();
    match decoder.decode(&batch) {
        Err(WMError::TokenOutOfRange { index }) => assert_eq!(index, PIECES.len() as i64),
        other => panic!("unexpected: {other:?}"),
    }
}

fn batch_strategy() -> impl Strategy<Value = Vec<Vec<i64>>> {
    (0usize..24, 0usize..12).prop_flat_map(|(rows, cols)| {
        proptest::collection::vec(
            proptest::collection::vec(0i64..PIECES.len() as i64, cols),
            rows,
        )
    })
}

fn to_batch(rows: &[Vec<i64>]) -> TokenBatch {
    let seq_len = rows.first().map_or(0, Vec::len);
    let data: Vec<i64> = rows.iter().flatten().copied().collect();
    TokenBatch::new(vec![rows.len(), seq_len], data).unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_one_string_per_row(rows in batch_strategy()) {
        let decoder = BatchDecoder::new(Arc::new(PieceMapVocab::from_pieces(PIECES).unwrap()));
        let batch = to_batch(&rows);

        let decoded = decoder.decode(&batch).unwrap();
        prop_assert_eq!(decoded.len(), rows.len());
    }

    #[test]
    fn prop_rows_decode_independently(rows in batch_strategy()) {
        let decoder = BatchDecoder::new(Arc::new(PieceMapVocab::from_pieces(PIECES).unwrap()));

        let decoded = decoder.decode(&to_batch(&rows)).unwrap();
        for (row, text) in rows.iter().zip(decoded.iter()) {
            let single = decoder.decode(&to_batch(std::slice::from_ref(row))).unwrap();
            prop_assert_eq!(&single[0], text);
        }
    }

    #[test]
    fn prop_thread_count_does_not_change_output(rows in batch_strategy()) {
        let vocab = Arc::new(PieceMapVocab::from_pieces(PIECES).unwrap());
        let batch = to_batch(&rows);

        let serial = BatchDecoderOptions::default()
            .with_parallel(false)
            .build(vocab.clone())
            .decode(&batch)
            .unwrap();

        let decoder = BatchDecoder::new(vocab);
        for threads in [1, 2, 3, 8] {
            let pool = rayon::ThreadPoolBuilder::new()
                .num_threads(threads)
                .build()
                .unwrap();
            let parallel = pool.install(|| decoder.decode(&batch)).unwrap();
            prop_assert_eq!(&parallel, &serial);
        }
    }

    #[test]
    fn prop_decoding_is_deterministic(rows in batch_strategy()) {
        let decoder = BatchDecoder::new(Arc::new(PieceMapVocab::from_pieces(PIECES).unwrap()));
        let batch = to_batch(&rows);

        prop_assert_eq!(decoder.decode(&batch).unwrap(), decoder.decode(&batch).unwrap());
    }

    #[test]
    fn prop_id_width_does_not_change_output(rows in batch_strategy()) {
        let decoder = BatchDecoder::new(Arc::new(PieceMapVocab::from_pieces(PIECES).unwrap()));
        let b64 = to_batch(&rows);

        let narrow = |dtype: DType, width: usize| {
            let bytes: Vec<u8> = rows
                .iter()
                .flatten()
                .flat_map(|v| v.to_le_bytes()[..width].to_vec())
                .collect();
            TokenBatch::from_le_bytes(dtype, b64.shape().to_vec(), &bytes).unwrap()
        };

        let expected = decoder.decode(&b64).unwrap();
        prop_assert_eq!(&decoder.decode(&narrow(DType::I32, 4)).unwrap(), &expected);
        prop_assert_eq!(&decoder.decode(&narrow(DType::I16, 2)).unwrap(), &expected);
    }
}
