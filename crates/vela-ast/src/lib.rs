mod node;
mod nodes;
mod port;
mod support;

pub use node::AstNode;
pub use nodes::{
    Declarator, InstancePort, InstancePortList, ModuleBody, ModuleDecl, ModuleInstantiation,
    Port, PortDecl, PortList, SourceFile,
};
pub use port::PortDirection;
pub use support::AstChildren;
