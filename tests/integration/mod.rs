// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

mod helpers;
mod pipeline_test;
mod summarize_test;
