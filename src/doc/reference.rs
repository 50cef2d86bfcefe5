/*!
# Language Reference

## Line format

<pre><code>&nbsp;LEFT&gt;OPRIGHT;
</code></pre>

The left operand runs up to the first `>` that is not preceded by a `\`.
The next character is the operator. The right operand runs up to `;`.
Text after the `;` is ignored. A `//` before the right operand makes the
whole line a comment. A line that never reaches its `;` does nothing but
still has a line number.

## Operators

| Operator | Name     | Effect                                  | Right side must be |
|----------|----------|-----------------------------------------|--------------------|
| `>`      | move     | right = left                            | writable           |
| `?`      | jump     | if left > 0, next line is right         | readable           |
| `+`      | add      | right = right + left                    | both               |
| `-`      | subtract | right = right - left                    | both               |
| `*`      | multiply | right = right * left                    | both               |
| `/`      | divide   | right = right / left, rounding to zero  | both               |

The left side must always be readable. Arithmetic wraps around on overflow.
Dividing by zero stops the program.

## Operands

| Operand       | Meaning                               | Read | Write |
|---------------|---------------------------------------|------|-------|
| `i`           | one integer from standard input       | yes  |       |
| `o`           | standard output as `> n`              |      | yes   |
| `r`           | one raw byte to standard output       |      | yes   |
| `l`           | the current line number               | yes  |       |
| `n`           | the newline character (10)            | yes  |       |
| `\x`          | the character code of `x`             | yes  |       |
| `123`, `-4`   | a number                              | yes  |       |
| `v12`         | variable 12                           | yes  | yes   |
| `c12`         | character variable 12                 | yes  | yes   |
| `vc5`, `cvv1` | nested variable                       | yes  | yes   |

Character variables store the low 8 bits of whatever is written to them.

## Nested variables

After the leading `v` or `c`, a nested operand holds more `v` and `c`
letters and then a number. The letters are looked up starting with the
one next to the number. `vc5` reads character variable 5 and uses that as
the index of the variable to read. `vvc5` goes one step further. Lookups
happen each time the line runs, so a loop can walk through memory by
changing the variables a nested operand refers to.

## Errors

Errors stop the program and name the line and, where it matters, the
side of the instruction.

<pre><code>&nbsp;MALFORMED OPERAND IN 3 LEFT; VARIABLE REQUIRES NUMBER, GOT "x"
&nbsp;INVALID OPERATOR IN 4; '%'
&nbsp;OPERAND ROLE VIOLATION IN 5 RIGHT; OUTPUT EXPECTED, GOT INPUT ONLY "7"
&nbsp;UNCLAMPED ACCESS IN 9 RIGHT; VARIABLE 300 NOT IN 0..256
&nbsp;DIVIDE BY ZERO IN 12
</code></pre>

Problems found while loading are all reported before anything runs.

*/
