// ============================================================
// Layer 2: Application / Use Cases
// ============================================================
// Orchestrates the other layers for a single run:
//
//   Loading   → WordlistLoader reads the file (Layer 4)
//   Streaming → Combiner feeds CandidateSink (Layers 4 and 5)
//   Done      → flush, report the Outcome
//
// Rules for this layer:
//   - No argument parsing (that's Layer 1)
//   - No byte-level decoding or pair iteration logic (Layer 4)
//   - Only workflow coordination

// The one and only workflow: generate every word pair
pub mod generate_use_case;
