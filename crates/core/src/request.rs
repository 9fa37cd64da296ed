use crate::entity::{Arguments, IdentityArguments, IdentityConverter};

/// Where a history entry leads back to. Supplied by the host framework.
pub trait NavigationalRequest: Clone {
    fn package_key(&self) -> &str;
    fn subpackage_key(&self) -> Option<&str>;
    fn controller_name(&self) -> &str;
    fn action_name(&self) -> &str;
    fn arguments(&self) -> &IdentityArguments;

    fn set_package_key(&mut self, package_key: String);
    fn set_subpackage_key(&mut self, subpackage_key: Option<String>);
    fn set_controller_name(&mut self, controller_name: String);
    fn set_action_name(&mut self, action_name: String);
    fn set_arguments(&mut self, arguments: IdentityArguments);
}

/// Partial replacement of a request's routing fields, applied before the
/// request is stored in the history.
#[derive(Clone, Debug, Default)]
pub struct RequestOverride {
    pub controller: Option<String>,
    pub action: Option<String>,
    pub package: Option<String>,
    pub subpackage: Option<String>,
    pub arguments: Option<Arguments>,
}

impl RequestOverride {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn controller<S: Into<String>>(mut self, s: S) -> Self {
        self.controller = Some(s.into());
        self
    }

    pub fn action<S: Into<String>>(mut self, s: S) -> Self {
        self.action = Some(s.into());
        self
    }

    pub fn package<S: Into<String>>(mut self, s: S) -> Self {
        self.package = Some(s.into());
        self
    }

    pub fn subpackage<S: Into<String>>(mut self, s: S) -> Self {
        self.subpackage = Some(s.into());
        self
    }

    pub fn arguments(mut self, arguments: Arguments) -> Self {
        self.arguments = Some(arguments);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.controller.is_none()
            && self.action.is_none()
            && self.package.is_none()
            && self.subpackage.is_none()
            && self.arguments.is_none()
    }

    /// Writes every present field onto `request`. Arguments go through
    /// `converter` so the stored request never holds live entities.
    pub fn apply_to<R: NavigationalRequest>(
        self,
        request: &mut R,
        converter: &dyn IdentityConverter,
    ) {
        if let Some(c) = self.controller {
            request.set_controller_name(c);
        }
        if let Some(a) = self.action {
            request.set_action_name(a);
        }
        if let Some(p) = self.package {
            request.set_package_key(p);
        }
        if let Some(s) = self.subpackage {
            request.set_subpackage_key(Some(s));
        }
        if let Some(args) = self.arguments {
            request.set_arguments(converter.convert_objects_to_identity_arrays(&args));
        }
    }
}
