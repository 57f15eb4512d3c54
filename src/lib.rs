//! A CHIP-8 virtual machine. The interpreter implements the base instruction set
//! described [here](https://en.wikipedia.org/wiki/CHIP-8#Opcode_table). Host concerns
//! such as rendering, input polling and timing cadence are left to collaborators
//! driving the machine through the `Chip` trait.
//! For graphical output it relies on the cursive text user interface library.
pub mod chip;
