use retrobind_input::PhysicalPrimitive;

/// Keyboard bindings are button primitives whose id is the scancode.
pub fn encode(primitive: PhysicalPrimitive) -> Option<u32> {
    match primitive {
        PhysicalPrimitive::Button(scancode) => Some(scancode),
        PhysicalPrimitive::Axis { .. } | PhysicalPrimitive::Hat { .. } => None,
    }
}
