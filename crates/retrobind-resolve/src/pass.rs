use log::info;

use retrobind_device::{
    disambiguate, sdl_device_path, DeviceClass, DeviceDescriptor, SpecialtyMatch, SubIndexMap,
};
use retrobind_input::{CanonicalInput, Technology};

use crate::code::Code;
use crate::resolver::Resolver;

/// Every canonical input of one controller resolved for one technology.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedController<'a> {
    pub descriptor: &'a DeviceDescriptor,
    /// Position among controllers sharing technology and name.
    pub sub_index: u32,
    pub bindings: Vec<(CanonicalInput, Code)>,
}

impl ResolvedController<'_> {
    pub fn code(&self, key: CanonicalInput) -> Option<&Code> {
        self.bindings
            .iter()
            .find(|(bound, _)| *bound == key)
            .map(|(_, code)| code)
    }

    /// Device path in the `SDL/<n>/<name>` form.
    pub fn sdl_path(&self) -> String {
        sdl_device_path(self.sub_index, self.descriptor.name())
    }

    pub fn unbound(&self) -> impl Iterator<Item = CanonicalInput> + '_ {
        self.bindings
            .iter()
            .filter(|(_, code)| !code.is_bound())
            .map(|(key, _)| *key)
    }
}

/// One configuration pass over the connected controllers.
pub struct ConfigurationPass<'r, 'c> {
    resolver: &'r Resolver<'r>,
    controllers: &'c [DeviceDescriptor],
    sub_indices: SubIndexMap,
}

impl<'r, 'c> ConfigurationPass<'r, 'c> {
    pub fn new(resolver: &'r Resolver<'r>, controllers: &'c [DeviceDescriptor]) -> Self {
        Self {
            resolver,
            controllers,
            sub_indices: disambiguate(controllers),
        }
    }

    pub fn controllers(&self) -> &'c [DeviceDescriptor] {
        self.controllers
    }

    pub fn sub_indices(&self) -> &SubIndexMap {
        &self.sub_indices
    }

    /// Resolves every canonical input of every controller for `technology`,
    /// each on its own device index.
    pub fn resolve_all(&self, technology: Technology) -> Vec<ResolvedController<'c>> {
        (0..self.controllers.len())
            .filter_map(|position| self.resolve_controller(position, technology))
            .collect()
    }

    /// Resolves the controller at `position` in enumeration order.
    pub fn resolve_controller(
        &self,
        position: usize,
        technology: Technology,
    ) -> Option<ResolvedController<'c>> {
        let descriptor = self.controllers.get(position)?;
        let bindings = CanonicalInput::ALL
            .into_iter()
            .map(|key| {
                let code =
                    self.resolver
                        .resolve(descriptor, key, technology, descriptor.device_index());
                (key, code)
            })
            .collect();

        let resolved = ResolvedController {
            descriptor,
            sub_index: self.sub_indices.get(position).unwrap_or(0),
            bindings,
        };
        info!(
            "player {}: {} via {technology}, {} unbound",
            descriptor.player(),
            descriptor.name(),
            resolved.unbound().count()
        );
        Some(resolved)
    }

    /// Controllers holding the `class` role.
    pub fn specialty(&self, class: DeviceClass, limit: usize) -> Vec<SpecialtyMatch<'_>> {
        self.resolver
            .specialty()
            .prioritize(self.controllers, class, limit)
    }
}
