pub mod cli;
pub mod config;
pub mod innertube;
pub mod logging;

pub use innertube::{
    audio, audio_with_mime, search, suggestions, HttpTransport, InnerTubeError, Track, Transport,
};
