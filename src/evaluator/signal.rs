use super::value::Value;

/// The outcome of executing a statement: either it completed normally, or it unwound with a
/// non-local control-flow signal that must propagate until an enclosing construct (a loop, a
/// function call) interprets it. These are deliberately *not* part of the error channel: a
/// `return` three blocks deep is not a failure, it is a normal unwind that the call frame
/// catches.
#[derive(Debug, Clone)]
pub enum Signal {
	Normal,
	Return(Value),
	Break,
	Continue,
}
