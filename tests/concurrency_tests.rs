// tests/concurrency_tests.rs
mod support;
use support::{init_tracing, Doc};

use std::collections::HashSet;
use std::sync::Arc;
use std::thread;

use sealed_object::consts::NONCE_LEN;
use sealed_object::core::decode;
use sealed_object::{EncryptionEngine, JsonCodec};

const THREADS: usize = 16;
const CALLS_PER_THREAD: usize = 50;

#[test]
fn shared_engine_survives_parallel_encrypts() {
    init_tracing();
    let engine: Arc<EncryptionEngine<JsonCodec<Doc>>> =
        Arc::new(EncryptionEngine::new("parallel-pw").unwrap());

    let mut handles = Vec::new();
    for t in 0..THREADS {
        let engine = Arc::clone(&engine);
        handles.push(thread::spawn(move || {
            let mut texts = Vec::with_capacity(CALLS_PER_THREAD);
            for i in 0..CALLS_PER_THREAD {
                let doc = Doc {
                    id: (t * CALLS_PER_THREAD + i) as u64,
                    title: format!("doc-{t}-{i}"),
                    tags: vec![format!("thread-{t}")],
                };
                texts.push((doc.clone(), engine.encrypt(&doc).unwrap()));
            }
            texts
        }));
    }

    // Every ciphertext round-trips to its own payload, no cross-corruption
    let mut nonces = HashSet::new();
    for handle in handles {
        for (doc, text) in handle.join().unwrap() {
            assert_eq!(engine.decrypt(&text).unwrap(), doc);
            let blob = decode(&text).unwrap();
            assert!(nonces.insert(blob[..NONCE_LEN].to_vec()), "nonce reused");
        }
    }
    assert_eq!(nonces.len(), THREADS * CALLS_PER_THREAD);
}

#[test]
fn parallel_decrypts_of_one_ciphertext_agree() {
    init_tracing();
    let engine: Arc<EncryptionEngine<JsonCodec<String>>> =
        Arc::new(EncryptionEngine::new("parallel-read-pw").unwrap());
    let text = Arc::new(engine.encrypt(&"shared secret".to_owned()).unwrap());

    let mut handles = Vec::new();
    for _ in 0..THREADS {
        let engine = Arc::clone(&engine);
        let text = Arc::clone(&text);
        handles.push(thread::spawn(move || {
            for _ in 0..CALLS_PER_THREAD {
                assert_eq!(engine.decrypt(&text).unwrap(), "shared secret");
            }
        }));
    }
    for handle in handles {
        handle.join().unwrap();
    }
}
