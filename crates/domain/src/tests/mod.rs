// Copyright (C) 2026 The FolkCal Authors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

mod dates;
mod error;
mod types;
