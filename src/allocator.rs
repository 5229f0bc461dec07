//! Memory Allocator Configuration
//!
//! The binary allocates many short-lived `String`s, one per cipher call and
//! per prompt. mimalloc handles that pattern well, so it replaces the system
//! allocator for the whole process.

use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;
