use datamodel_core::{
    ValidatedDatamodel,
    parser_database::{ScalarType, walkers},
};

pub(crate) trait DatamodelAssert<'a> {
    fn assert_has_type(&'a self, name: &str) -> walkers::TypeWalker<'a>;
}

pub(crate) trait TypeAssert<'a> {
    fn assert_field_count(self, count: usize) -> Self;
    fn assert_has_scalar_field(self, name: &str) -> walkers::ScalarFieldWalker<'a>;
    fn assert_has_relation_field(self, name: &str) -> walkers::RelationFieldWalker<'a>;
}

pub(crate) trait ScalarFieldAssert {
    fn assert_scalar_type(&self, scalar_type: ScalarType) -> &Self;
    fn assert_is_id(&self) -> &Self;
    fn assert_is_unique(&self) -> &Self;
}

impl<'a> DatamodelAssert<'a> for ValidatedDatamodel {
    #[track_caller]
    fn assert_has_type(&'a self, name: &str) -> walkers::TypeWalker<'a> {
        self.db
            .walk_types()
            .find(|ty| ty.name() == name)
            .expect("type not found")
    }
}

impl<'a> TypeAssert<'a> for walkers::TypeWalker<'a> {
    #[track_caller]
    fn assert_field_count(self, count: usize) -> Self {
        assert_eq!(self.scalar_fields().count() + self.relation_fields().count(), count);
        self
    }

    #[track_caller]
    fn assert_has_scalar_field(self, name: &str) -> walkers::ScalarFieldWalker<'a> {
        self.scalar_fields()
            .find(|field| field.name() == name)
            .expect("could not find scalar field with the given name")
    }

    #[track_caller]
    fn assert_has_relation_field(self, name: &str) -> walkers::RelationFieldWalker<'a> {
        self.relation_fields()
            .find(|field| field.name() == name)
            .expect("could not find relation field with the given name")
    }
}

impl ScalarFieldAssert for walkers::ScalarFieldWalker<'_> {
    #[track_caller]
    fn assert_scalar_type(&self, scalar_type: ScalarType) -> &Self {
        assert_eq!(self.scalar_type(), Some(scalar_type));
        self
    }

    #[track_caller]
    fn assert_is_id(&self) -> &Self {
        assert!(self.is_id());
        self
    }

    #[track_caller]
    fn assert_is_unique(&self) -> &Self {
        assert!(self.is_unique());
        self
    }
}
