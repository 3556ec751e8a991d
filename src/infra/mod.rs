// ============================================================
// Layer 5: Infrastructure Layer
// ============================================================
// Cross-cutting concerns that sit at the process boundary:
//
//   sink.rs    : Buffered candidate output
//                Writes each candidate straight into a BufWriter
//                and tells a closed consumer (broken pipe) apart
//                from a real write failure.
//
//   logging.rs : tracing subscriber setup
//                Sends log events to stderr so stdout carries
//                nothing but candidates.
//
// Reference: Rust Book §9 (Error Handling)

/// Buffered line-oriented candidate writer
pub mod sink;

/// tracing-subscriber initialisation
pub mod logging;
