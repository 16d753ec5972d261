mod introspection_tests;
mod snapshot_tests;
mod validation_context_tests;

use graphql_core::schema::Schema;
use graphql_core::schema::SchemaBuilder;

pub(crate) const PETS_SCHEMA_SDL: &str = r#"
type Query {
  animals: [Animal]
  dog: Dog
  findDog(filter: DogFilter): Dog
  human(id: ID!): Human
  pet: Pet
}

type Mutation {
  renameDog(name: String!): Dog
}

interface Pet {
  name(surname: Boolean): String
}

enum DogCommand { SIT, HEEL, DOWN }

type Dog implements Pet {
  barks: Boolean
  doesKnowCommand(dogCommand: DogCommand): Boolean
  name(surname: Boolean): String
  nickname: String
  owner: Human
}

type Cat implements Pet {
  meows: Boolean
  name(surname: Boolean): String
}

union Animal = Dog | Cat

type Human {
  name: String
  pets: [Pet]
}

input DogFilter {
  commands: [DogCommand!]
  name: String
  owner: OwnerFilter
}

input OwnerFilter {
  name: String
}

directive @tag(name: String!) on FIELD | FRAGMENT_SPREAD | INLINE_FRAGMENT
"#;

pub(crate) fn pets_schema() -> Schema {
    SchemaBuilder::from_str(PETS_SCHEMA_SDL)
        .expect("pets schema builds")
}
