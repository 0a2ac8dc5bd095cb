use core::marker::PhantomData;
use serde_core::{
    Deserialize, Deserializer, Serialize, Serializer,
    de::{SeqAccess, Visitor},
    ser::SerializeSeq,
};

use crate::EagerVec;

impl<T: Serialize> Serialize for EagerVec<T> {
    /// Serialize an `EagerVec` as a sequence.
    ///
    /// Only the live elements are encoded; parked values in the spare
    /// region never appear in the output.
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for element in self {
            seq.serialize_element(element)?;
        }
        seq.end()
    }
}

impl<'de, T: Deserialize<'de> + Default> Deserialize<'de> for EagerVec<T> {
    /// Deserialize an `EagerVec` from a sequence.
    ///
    /// The sequence's size hint preallocates capacity; elements beyond the
    /// hint grow the vector through the normal policy.
    #[inline]
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct EagerVecVisitor<T> {
            _marker: PhantomData<T>,
        }

        impl<'de, T: Deserialize<'de> + Default> Visitor<'de> for EagerVecVisitor<T> {
            type Value = EagerVec<T>;

            fn expecting(&self, formatter: &mut core::fmt::Formatter) -> core::fmt::Result {
                formatter.write_str("a sequence")
            }

            fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
            where
                A: SeqAccess<'de>,
            {
                let mut vec = EagerVec::with_capacity(seq.size_hint().unwrap_or(0));
                while let Some(value) = seq.next_element()? {
                    vec.push(value);
                }
                Ok(vec)
            }
        }

        deserializer.deserialize_seq(EagerVecVisitor {
            _marker: PhantomData,
        })
    }
}
