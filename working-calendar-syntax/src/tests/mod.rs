mod loose;

macro_rules! tokens {
    ( @marker ) => { $crate::day::DayMarker::Plain };
    ( @marker $marker: ident ) => { $crate::day::DayMarker::$marker };
    ( $( $day: literal $( $marker: ident )? ),* $( , )? ) => {
        vec![ $(
            $crate::day::DayToken::new($day, tokens!(@marker $( $marker )?))
        ),* ]
    };
}

pub(crate) use tokens;
