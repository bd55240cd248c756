#![allow(dead_code)]

use std::path::PathBuf;

use crypto_inventory_core::engine::{CallSite, DetectionStore, Expression};
use crypto_inventory_core::model::{Convention, Location};
use crypto_inventory_core::{Asset, Pipeline};

pub const FILE: &str = "src/main/java/Crypto.java";

pub fn get_fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

pub fn loc(line: usize) -> Location {
    Location::new(FILE, line, 9)
}

pub fn cipher_get_instance(transformation: &str, line: usize) -> CallSite {
    CallSite::new("javax.crypto.Cipher", "getInstance", loc(line))
        .with_argument(Expression::string(transformation))
}

pub fn secret_key_spec(algorithm: &str, line: usize) -> CallSite {
    CallSite::constructor("javax.crypto.spec.SecretKeySpec", loc(line))
        .with_argument(Expression::unknown_symbol("keyBytes"))
        .with_argument(Expression::string(algorithm))
}

pub fn signature_get_instance(algorithm: &str, line: usize) -> CallSite {
    CallSite::new("java.security.Signature", "getInstance", loc(line))
        .with_argument(Expression::string(algorithm))
}

pub fn analyze(calls: &[CallSite]) -> Vec<Asset> {
    Pipeline::standard()
        .expect("standard pipeline")
        .analyze(calls)
        .assets()
}

/// The same detection as if it had been made under another API family.
pub fn retag(store: &mut DetectionStore, convention: Convention) {
    store.convention = convention;
    for children in store.children.values_mut() {
        for child in children {
            retag(child, convention);
        }
    }
}

pub fn all_unique(assets: &[Asset]) -> bool {
    assets.iter().all(Asset::has_unique_child_kinds)
}
