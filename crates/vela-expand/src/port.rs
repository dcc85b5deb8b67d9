use smol_str::SmolStr;
use vela_ast::PortDirection;
use vela_source::TextSize;

/// Where a port entered the module's port surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeclStyle {
    /// Declared with a direction inside the header parenthesis list.
    AnsiHeader,
    /// Named in the header and given a direction in the module body.
    NonAnsiBody,
}

/// A single port of a module, as seen by directive expansion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Port {
    pub name: SmolStr,
    pub direction: PortDirection,
    pub style: DeclStyle,
    pub first_seen: TextSize,
}

/// Emission order of the direction buckets.
pub const BUCKET_ORDER: [PortDirection; 3] = [
    PortDirection::Input,
    PortDirection::Inout,
    PortDirection::Output,
];

/// Ordered, name-deduplicated port list.
///
/// Insertion preserves the first occurrence's position in the list; a
/// re-declaration of the same name only updates the direction, so the last
/// declared direction wins while source order is kept.
#[derive(Debug, Default, Clone)]
pub struct PortList {
    ports: Vec<Port>,
}

impl PortList {
    pub fn push(&mut self, port: Port) {
        if let Some(existing) = self.ports.iter_mut().find(|p| p.name == port.name) {
            existing.direction = port.direction;
        } else {
            self.ports.push(port);
        }
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Port> {
        self.ports.iter()
    }

    pub fn len(&self) -> usize {
        self.ports.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ports.is_empty()
    }

    /// Drop every port whose name fails the predicate.
    pub fn retain(&mut self, f: impl FnMut(&Port) -> bool) {
        self.ports.retain(f);
    }

    /// Ports of one direction, in list order.
    pub fn bucket(&self, direction: PortDirection) -> impl Iterator<Item = &Port> {
        self.ports.iter().filter(move |p| p.direction == direction)
    }

    /// Non-empty direction buckets in fixed emission order
    /// (inputs, inouts, outputs).
    pub fn buckets(&self) -> Vec<(PortDirection, Vec<&Port>)> {
        BUCKET_ORDER
            .iter()
            .filter_map(|&dir| {
                let ports: Vec<&Port> = self.bucket(dir).collect();
                if ports.is_empty() {
                    None
                } else {
                    Some((dir, ports))
                }
            })
            .collect()
    }
}
