/// Conversion of internal results into their external representation
pub mod export;
/// External (serializable) representations of orders and results
pub mod ext_repr;
/// Conversion of external representations into internal entities
pub mod import;
