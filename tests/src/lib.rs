#![cfg(test)]

mod doubles;
mod session;
