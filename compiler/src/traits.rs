use brine_zod_schema::Schema;

use crate::expr::Expression;

/// Compiles an arbitrary schema node. Node compilers that embed other schemas
/// (such as a string's `contentSchema`) delegate through this trait.
pub trait CompileAny {
    fn compile_any(&self, node: &Schema) -> Expression;
}
