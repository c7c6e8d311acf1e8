// Tests live on /src/tests so they can reference modules inside the src
// folder directly instead of going through the public crate surface.
mod command;
