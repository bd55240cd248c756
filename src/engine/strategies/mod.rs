// Resolution strategies for call arguments.
//
// Strategies are tried in order. Each one handles one expression shape and
// either settles the argument or points the resolver at the next expression
// to look at.
//
// 1. Literal - direct values: 256, "AES/GCM/NoPadding"
// 2. Symbol  - traced symbols: KEY_SIZE -> its definition
// 3. Call    - nested calls handed to dependent rules: new SecretKeySpec(...)

pub mod call;
pub mod literal;
pub mod symbol;

pub use call::CallStrategy;
pub use literal::LiteralStrategy;
pub use symbol::SymbolStrategy;
