// Copyright (C) 2026 The FolkCal Authors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

mod holiday_tests;
mod initialization_tests;
mod user_event_tests;

use folkcal_domain::Festival;

pub fn create_test_festival(event_name: &str) -> Festival {
    Festival {
        festival_id: None,
        event_name: String::from(event_name),
        month: String::from("Dec"),
        general_date: String::from("Early Dec"),
        location: String::from("Kisama, Nagaland"),
        festival_type: String::from("Tribal"),
        summary: String::from("The festival of festivals"),
        hook_intro: String::from("Sixteen tribes, one valley"),
        time_of_day: Some(String::from("Day")),
        latitude: Some(String::from("25.6058")),
        longitude: Some(String::from("94.1086")),
        content_potential: None,
        voiceover_prompt: None,
        ideal_titles: None,
    }
}
