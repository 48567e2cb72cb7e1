// Copyright (c)  by Gleb E. Zaslavkiy
//MIT License
#![allow(non_camel_case_types)]
#![allow(non_snake_case)]
pub mod calculus;
pub mod numerical;
pub mod symbolic;
pub mod vector_calculus;
