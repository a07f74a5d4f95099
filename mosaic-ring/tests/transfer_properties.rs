//! Property tests checking the ring against a queue model: any interleaving
//! of partial writes and reads must preserve byte order, conserve counts,
//! and keep the full/empty flags consistent with the modeled occupancy.

use std::collections::VecDeque;

use proptest::prelude::*;

use mosaic_ring::RingBuffer;

#[derive(Debug, Clone)]
enum Op {
    Write(Vec<u8>),
    Read(usize),
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        proptest::collection::vec(any::<u8>(), 0..24).prop_map(Op::Write),
        (0usize..24).prop_map(Op::Read),
    ]
}

proptest! {
    #[test]
    fn matches_queue_model(
        capacity in 1usize..17,
        ops in proptest::collection::vec(op_strategy(), 1..64),
    ) {
        let mut ring = RingBuffer::try_with_capacity(capacity).unwrap();
        let mut model: VecDeque<u8> = VecDeque::new();

        for op in ops {
            match op {
                Op::Write(src) => {
                    let written = ring.write(&src);

                    // A full ring accepts nothing; otherwise exactly what fits
                    let expected = if model.len() == capacity || src.is_empty() {
                        0
                    } else {
                        src.len().min(capacity - model.len())
                    };
                    prop_assert_eq!(written, expected);
                    model.extend(&src[..written]);
                }
                Op::Read(len) => {
                    let mut dst = vec![0u8; len];
                    let read = ring.read(&mut dst);

                    let expected = if model.is_empty() || len == 0 {
                        0
                    } else {
                        len.min(model.len())
                    };
                    prop_assert_eq!(read, expected);
                    for byte in &dst[..read] {
                        prop_assert_eq!(Some(*byte), model.pop_front());
                    }
                }
            }

            // Flags always agree with modeled occupancy
            prop_assert_eq!(ring.is_empty(), model.is_empty());
            prop_assert_eq!(ring.is_full(), model.len() == capacity);
            prop_assert_eq!(ring.len(), model.len());
        }
    }

    #[test]
    fn single_transfer_round_trip(
        capacity in 1usize..64,
        payload in proptest::collection::vec(any::<u8>(), 1..64),
    ) {
        // Any write immediately read back returns the accepted prefix intact
        let mut ring = RingBuffer::try_with_capacity(capacity).unwrap();

        let written = ring.write(&payload);
        prop_assert_eq!(written, payload.len().min(capacity));

        let mut out = vec![0u8; written];
        prop_assert_eq!(ring.read(&mut out), written);
        prop_assert_eq!(&out[..], &payload[..written]);
        prop_assert!(ring.is_empty());
    }

    #[test]
    fn stays_coherent_across_many_wraps(
        capacity in 1usize..9,
        chunks in proptest::collection::vec(
            proptest::collection::vec(any::<u8>(), 1..8),
            1..32,
        ),
    ) {
        // Stream every chunk through a small ring, draining after each
        // write; wraparound happens constantly and order must survive
        let mut ring = RingBuffer::try_with_capacity(capacity).unwrap();
        let mut streamed = Vec::new();
        let mut expected = Vec::new();

        for chunk in chunks {
            let mut offset = 0;
            while offset < chunk.len() {
                let written = ring.write(&chunk[offset..]);
                expected.extend_from_slice(&chunk[offset..offset + written]);
                offset += written;

                let mut out = vec![0u8; capacity];
                let read = ring.read(&mut out);
                streamed.extend_from_slice(&out[..read]);
            }
        }

        // Everything written was streamed out, in order
        prop_assert_eq!(streamed, expected);
        prop_assert!(ring.is_empty());
    }
}
