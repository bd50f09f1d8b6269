//! A sack serializes as a plain sequence in link order. Deserializing adds
//! the elements one by one, which reproduces the multiset but not the link
//! order.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::{ArenaSack, LinkedSack};

macro_rules! sequence_serde {
    ($($sack:ident),*) => {$(
        impl<T: Serialize> Serialize for $sack<T> {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.collect_seq(self.iter())
            }
        }

        impl<'de, T: Deserialize<'de>> Deserialize<'de> for $sack<T> {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                Vec::<T>::deserialize(deserializer).map(|values| values.into_iter().collect())
            }
        }
    )*};
}

sequence_serde!(LinkedSack, ArenaSack);
