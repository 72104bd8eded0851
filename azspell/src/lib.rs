/*! Dictionary-based spelling correction for free text.

Splits text into word and non-word segments, looks every word up in a
frequency dictionary through a [`Speller`](speller::Speller), and writes the
best correction back with the casing of the original word. Approximate
matching is provided by [`SymSpell`] when the `symspell` feature is enabled
(the default).

[`SymSpell`]: (https://github.com/wolfgarbe/SymSpell)

# Usage examples

```no_run
use azspell::config::Config;
use azspell::corrector::correct_text;
use azspell::engine::Engine;

let config = Config::from_env();
let engine = Engine::init(&config).expect("engine failed to initialize");
println!("{}", correct_text(engine.as_ref(), "Helo world!"));
```

The `azspell` binary in the `azspell-bin` crate of this repository serves the
same pipeline over HTTP.
*/

#![warn(missing_docs)]
pub mod config;
pub mod corrector;
pub mod engine;
pub mod error;
pub mod speller;
pub mod tokenizer;
