use crate::loc;
use std::marker::PhantomData;

/// Represents a strongly-typed, `String`-named reference to a
/// "resource" (`TResource`) stored within some other data-store (`TSource`)
/// without holding an explicit reference to the data-store. De-referencing a
/// [NamedRef] is done via [NamedRef::deref()] by providing an explicit
/// reference to the `TSource`.
///
/// As a concrete example, [crate::types::ObjectType] stores a
/// `Vec<NamedRef<crate::schema::Schema, crate::types::GraphQLType>>` as a way
/// of storing "pointers" to the [crate::types::InterfaceType]s it implements.
/// Storing names instead of direct references allows
/// [crate::schema::Schema] to own all of its types without a need for
/// self-references.
#[derive(Clone, Debug, PartialEq)]
pub struct NamedRef<
    TSource,
    TResource: DerefByName<Source=TSource>,
> {
    name: String,
    phantom: PhantomData<TResource>,
    ref_location: loc::SourceLocation,
}
impl<TSource, TResource: DerefByName<Source=TSource>> NamedRef<TSource, TResource> {
    pub fn deref<'a>(
        &self,
        source: &'a TSource,
    ) -> Result<&'a TResource, DerefByNameError> {
        TResource::deref_name(source, self.name.as_str())
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn new(
        name: impl AsRef<str>,
        ref_location: loc::SourceLocation,
    ) -> NamedRef<TSource, TResource> {
        NamedRef {
            name: name.as_ref().to_string(),
            phantom: PhantomData,
            ref_location,
        }
    }

    pub fn ref_location(&self) -> &loc::SourceLocation {
        &self.ref_location
    }
}

/// Implement this trait for any type that could be referenced by name. This
/// will enable usage of [`NamedRef`] for that type.
pub trait DerefByName: Clone + core::fmt::Debug {
    type Source;

    fn deref_name<'a>(
        source: &'a Self::Source,
        name: &str,
    ) -> Result<&'a Self, DerefByNameError> where Self: Sized;
}

#[derive(Clone, Debug, PartialEq)]
pub enum DerefByNameError {
    DanglingReference(String),
}
