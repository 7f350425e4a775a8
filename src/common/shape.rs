//! Output shape selection per (resource, action). Genres, actors and halls have
//! a single representation and never go through here.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Resource {
    Movie,
    MovieSession,
    Order,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    List,
    Retrieve,
    Create,
    Update,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Shape {
    /// Compact, flattened rows for collection listings.
    Summary,
    /// Fully nested representation of a single record.
    Detail,
    /// The editable fields as accepted on input.
    Write,
}

impl Shape {
    pub fn resolve(resource: Resource, action: Action) -> Shape {
        match (resource, action) {
            (Resource::Movie | Resource::MovieSession, Action::List) => Shape::Summary,
            (Resource::Movie | Resource::MovieSession, Action::Retrieve) => Shape::Detail,
            // Orders are always listed with nested tickets.
            (Resource::Order, Action::List | Action::Retrieve) => Shape::Detail,
            _ => Shape::Write,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_resources_switch_shape_by_action() {
        for resource in [Resource::Movie, Resource::MovieSession] {
            assert_eq!(Shape::resolve(resource, Action::List), Shape::Summary);
            assert_eq!(Shape::resolve(resource, Action::Retrieve), Shape::Detail);
            assert_eq!(Shape::resolve(resource, Action::Create), Shape::Write);
            assert_eq!(Shape::resolve(resource, Action::Update), Shape::Write);
        }
    }

    #[test]
    fn orders_read_nested_and_write_flat() {
        assert_eq!(Shape::resolve(Resource::Order, Action::List), Shape::Detail);
        assert_eq!(Shape::resolve(Resource::Order, Action::Retrieve), Shape::Detail);
        assert_eq!(Shape::resolve(Resource::Order, Action::Create), Shape::Write);
    }
}
