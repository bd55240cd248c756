use crate::engine::{DetectedValue, RawValue};
use crate::model::{Forest, Kind, NodeId};

use super::{algorithm, common};

pub fn translate(forest: &mut Forest, value: &DetectedValue) -> Option<NodeId> {
    match &value.value {
        RawValue::Algorithm(name) => {
            algorithm::build_if(forest, name, &value.location, |kind| kind == Kind::Mac)
        }
        _ => common::translate(forest, value),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::Size;
    use crate::model::Location;

    #[test]
    fn test_hmac_name() {
        let mut forest = Forest::new();
        let value = DetectedValue::new(RawValue::Algorithm("HmacSHA512".into()), Location::default());
        let id = translate(&mut forest, &value).unwrap();
        assert_eq!(forest.name(id), "HMAC-SHA512");
        assert_eq!(forest.child_name(id, Kind::MessageDigest), Some("SHA-512"));
    }

    #[test]
    fn test_mac_size_is_a_tag_length() {
        let mut forest = Forest::new();
        let value = DetectedValue::new(RawValue::MacSize(Size::bits(64)), Location::default());
        let id = translate(&mut forest, &value).unwrap();
        assert_eq!(forest.kind(id), Kind::TagLength);
        assert_eq!(forest.name(id), "64");
    }
}
